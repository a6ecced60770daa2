fn main() {
    anypkg::run_cli();
}
