pub mod loaders;
pub mod queues;
pub mod roundabout;
pub mod ticket;
