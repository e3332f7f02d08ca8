//! Static reference tables compiled into the binary

pub mod ideal;
pub mod irrigation;
pub mod nutrients;
pub mod soil;
pub mod thermal;
pub mod weather;
