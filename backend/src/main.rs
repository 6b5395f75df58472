use std::process::ExitCode;

fn main() -> ExitCode {
  vitrina_lib::run()
}
