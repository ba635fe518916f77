/// Admission test for candidate placements
pub mod adjacency;
/// Growth driver and session orchestration
pub mod executor;
/// Frontier queue and lattice seen set
pub mod frontier;
