use std::process;
use xc_report_export::cli::Program;
use xc_report_export::launcher::launch;

#[tokio::main]
async fn main() {
    let exit_code = launch(Program::BomXml).await;
    process::exit(exit_code.as_i32());
}
