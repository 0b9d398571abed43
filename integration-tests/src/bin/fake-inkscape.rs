fn main() {
    integration_tests::fake_converter_main();
}
