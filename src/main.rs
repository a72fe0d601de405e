use std::process::ExitCode;

fn main() -> ExitCode {
    meal_finder::run()
}
