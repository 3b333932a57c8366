//! Network message test vectors.
//!
//! Uniformly random messages for the network test harness, printed as
//! `init_net_msg(...)` calls. This generator has a single mode and, unlike
//! the others, emits no `num_inputs` header.

use std::fmt;

use serde::Serialize;
use tracing::debug;
use tvgen_common::{max_value, SizedHex, VectorRng};
use tvgen_config::NetConfig;

/// Bit widths of the message fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NetWidths {
    /// Width of the source and destination fields.
    pub srcdest: u32,
    /// Width of the opaque field.
    pub opaque: u32,
    /// Width of the payload field.
    pub payload: u32,
}

/// One network message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NetMsg {
    /// Source port.
    pub src: u32,
    /// Destination port.
    pub dest: u32,
    /// Opaque tag carried through the network unchanged.
    pub opaque: u32,
    /// Payload.
    pub payload: u32,
}

/// A complete network message dataset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NetMsgDataset {
    /// Field widths used for rendering.
    pub widths: NetWidths,
    /// Messages in draw order.
    pub messages: Vec<NetMsg>,
}

/// Draws `config.trials` messages.
///
/// Fields are drawn in the order source, destination, opaque, payload.
pub fn generate<R: VectorRng>(config: &NetConfig, rng: &mut R) -> NetMsgDataset {
    let last_port = config.num_ports.saturating_sub(1);
    let opaque_max = max_value(config.opaque_nbits);
    let payload_max = max_value(config.payload_nbits);

    let messages: Vec<NetMsg> = (0..config.trials)
        .map(|_| NetMsg {
            src: rng.randint(0, last_port),
            dest: rng.randint(0, last_port),
            opaque: rng.randint(0, opaque_max),
            payload: rng.randint(0, payload_max),
        })
        .collect();

    debug!(
        trials = messages.len(),
        num_ports = config.num_ports,
        "generated net-msg dataset"
    );

    NetMsgDataset {
        widths: NetWidths {
            srcdest: config.srcdest_nbits,
            opaque: config.opaque_nbits,
            payload: config.payload_nbits,
        },
        messages,
    }
}

impl fmt::Display for NetMsgDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.widths;
        for m in &self.messages {
            writeln!(
                f,
                "init_net_msg( {}, {}, {}, {} );",
                SizedHex::new(w.srcdest, m.src),
                SizedHex::new(w.srcdest, m.dest),
                SizedHex::new(w.opaque, m.opaque),
                SizedHex::new(w.payload, m.payload)
            )?;
        }
        Ok(())
    }
}
