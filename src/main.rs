fn main() {
    keypath::cli::run();
}
