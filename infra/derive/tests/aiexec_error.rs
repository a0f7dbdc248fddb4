#[test]
fn aiexec_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/aiexec_error_pass.rs");
    t.pass("tests/ui/aiexec_error_identified.rs");
    t.compile_fail("tests/ui/aiexec_error_tuple_variant.rs");
    t.compile_fail("tests/ui/aiexec_error_no_context.rs");
    t.compile_fail("tests/ui/aiexec_error_bad_context_type.rs");
    t.compile_fail("tests/ui/aiexec_error_duplicate_source.rs");
}
