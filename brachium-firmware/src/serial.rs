//! Host serial link
//!
//! Commands arrive one byte at a time without blocking the control loop;
//! replies are written out in full.

use defmt::*;
use embassy_rp::uart::{BufferedUartRx, BufferedUartTx};
use embedded_io::{Read, ReadReady, Write};

use brachium_protocol::{Reply, ReplyLine};

/// Buffered UART split into its halves
pub struct Serial {
    rx: BufferedUartRx,
    tx: BufferedUartTx,
    line: ReplyLine,
}

impl Serial {
    pub fn new(rx: BufferedUartRx, tx: BufferedUartTx) -> Self {
        Self {
            rx,
            tx,
            line: ReplyLine::new(),
        }
    }

    /// Take one received byte if any is waiting
    pub fn poll_byte(&mut self) -> Option<u8> {
        match self.rx.read_ready() {
            Ok(true) => {}
            Ok(false) => return None,
            Err(e) => {
                warn!("UART error: {:?}", e);
                return None;
            }
        }

        let mut byte = [0u8; 1];
        match self.rx.read(&mut byte) {
            Ok(1) => Some(byte[0]),
            Ok(_) => None,
            Err(e) => {
                warn!("UART read error: {:?}", e);
                None
            }
        }
    }

    /// Format and send a reply line
    pub fn reply(&mut self, reply: Reply<'_>) {
        if reply.write_to(&mut self.line).is_err() {
            warn!("Reply too long: {}", reply);
            return;
        }
        if let Err(e) = self.tx.write_all(self.line.as_bytes()) {
            warn!("UART write error: {:?}", e);
        }
    }
}
