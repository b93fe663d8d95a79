#[cfg(test)]
pub mod envelope_tests;
#[cfg(test)]
pub mod governance_flow_tests;
