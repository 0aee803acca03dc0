mod permission_query_service_tests;
mod support;
