mod graphql_type_tests;
mod type_ref_tests;
