mod transport_action_executor_tests;
