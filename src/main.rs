fn main() {
    spvbuild::app::cli::run();
}
