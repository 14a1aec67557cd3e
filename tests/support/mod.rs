// Shared by several integration test binaries; each binary uses only part of
// this surface, so silence the resulting dead_code noise.
#[allow(dead_code)]
pub mod builders;
#[allow(dead_code)]
pub mod http;
#[allow(dead_code, unused_imports)]
pub mod mocks;
