//! Edge case tests for jsonata-lex
