//! Adapters: concrete implementations of the port traits.
//!
//! | Adapter    | Implements   | Connects to                  |
//! |------------|--------------|------------------------------|
//! | `console`  | DisplayPort  | Text grid on stdout          |
//! | `log_sink` | EventSink    | `log` facade                 |
//! | `logging`  | (host setup) | `tracing-subscriber`, stderr |

pub mod console;
pub mod log_sink;
pub mod logging;
