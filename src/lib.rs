// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to run one upload against the
// style-extraction service.
//
// Module responsibilities:
// - `api`: Encapsulates the HTTP interaction with the service (the dual
//   document upload) and the decoded response shapes.
// - `report`: Turns a decoded response into the printed text report.
// - `ui`: Resolves the input paths and drives the upload with a spinner.
// - `logger`: tracing subscriber setup for the binary.
//
// Keeping `report` and `api` apart lets the output contract be tested
// without a running service.
pub mod api;
pub mod logger;
pub mod report;
pub mod ui;
