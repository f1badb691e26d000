fn main() {
    support_desk::run_app();
}
