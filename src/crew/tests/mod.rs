mod test_utils;

mod agent_tests;
mod prompt_tests;
mod task_tests;
