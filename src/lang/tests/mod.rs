mod parse_test;
