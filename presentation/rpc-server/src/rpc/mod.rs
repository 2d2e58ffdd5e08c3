pub mod codec;
pub mod connection;
pub mod dispatcher;
pub mod error;
pub mod packet;
pub mod product;
