mod document_tests;
mod value_tests;
