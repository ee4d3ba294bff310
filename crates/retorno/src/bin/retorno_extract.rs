//! retorno-extract - Decode retorno files and list their settlements.

fn main() -> std::process::ExitCode {
    retorno::cmd::extract_cmd::main()
}
