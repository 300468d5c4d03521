fn main() {
    py2pddl_init::app::cli::run();
}
