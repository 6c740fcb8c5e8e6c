//! Edge case tests for vmode-lex
