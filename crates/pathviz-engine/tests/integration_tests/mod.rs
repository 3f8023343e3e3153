mod scenario_tests;
mod snapshot_tests;
