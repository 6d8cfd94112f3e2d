mod region;

pub use region::RegionCommands;
