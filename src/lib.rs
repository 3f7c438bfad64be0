//! Workspace-level integration test harness for FFTCalc-rs.
