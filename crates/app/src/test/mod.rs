//! Test support.


pub(crate) use memory::MemoryAgentsRepository;
