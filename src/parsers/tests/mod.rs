mod pagination_tests;
