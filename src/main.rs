fn main() {
    ninja_deflect::game::run();
}
