mod materializer_tests;
