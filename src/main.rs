#![forbid(unsafe_code)]

use lazy_static::lazy_static;
use log::info;
use poem::listener::TcpListener;
use poem::EndpointExt;

// Greet Server Utilities
use crate::utils::config::{init_log, init_runtime_context, RuntimeCtx};
use crate::utils::errors::Errors;
use crate::utils::greeting::compose_greeting;
use crate::v1::greet::greet_all;

// Modules
mod utils;
mod v1;

// ***************************************************************************
//                                Constants
// ***************************************************************************
const SERVER_NAME : &str = "GreetServer"; // for poem logging

// ***************************************************************************
//                             Static Variables
// ***************************************************************************
// Lazily initialize the runtime context so that it has a 'static lifetime.
// The context carries the fixed server parameters and the shared identifier
// source used by the startup greeting and every request.
lazy_static! {
    static ref RUNTIME_CTX: RuntimeCtx = init_runtime_context();
}

// ---------------------------------------------------------------------------
// main:
// ---------------------------------------------------------------------------
#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // --------------- Initialize Greet Server --------
    // Announce ourselves.  This is the only line the process ever writes to
    // stdout; it must precede the listener start.
    println!("{}", compose_greeting(&RUNTIME_CTX.id_source.next_id()));

    // Initialize the server.
    greet_init();

    // --------------- Main Loop Set Up ---------------
    // Assign the listen address.  The port is fixed; there is no external
    // override.
    let addr = format!("{}:{}",
        RUNTIME_CTX.parms.config.http_addr,
        RUNTIME_CTX.parms.config.http_port);

    // The greeting endpoint is the whole application: it runs as the root
    // endpoint rather than behind a route table, so every method on every
    // path reaches it.  Concurrency across connections is one lightweight
    // task per accepted connection, courtesy of the poem server loop.
    let app = greet_all.data(RUNTIME_CTX.id_source.clone());

    // ------------------ Main Loop -------------------
    // A bind failure propagates out of main; there is no retry.
    poem::Server::new(TcpListener::bind(addr))
        .name(SERVER_NAME)
        .run(app)
        .await
}

// ***************************************************************************
//                             Private Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// greet_init:
// ---------------------------------------------------------------------------
/** Initialize all subsystems other than those needed to configure the main
 * loop processor.
 */
fn greet_init() {
    // Configure our log.
    init_log();

    // Force the reading of input parameters and initialization of the
    // runtime context.
    info!("{}", Errors::InputParms(format!("{:#?}", RUNTIME_CTX.parms)));

    // Log build info.
    print_version_info();
}

// ---------------------------------------------------------------------------
// print_version_info:
// ---------------------------------------------------------------------------
fn print_version_info() {
    // Log build info.
    info!("{}.", format!("\n*** Running GREET={}, BRANCH={}, COMMIT={}, DIRTY={}, RUSTC={}",
                        option_env!("CARGO_PKG_VERSION").unwrap_or("unknown"),
                        env!("GIT_BRANCH"),
                        env!("GIT_COMMIT_SHORT"),
                        env!("GIT_DIRTY"),
                        env!("RUSTC_VERSION")),
    );
}
