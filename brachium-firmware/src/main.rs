//! Brachium - Stepper Arm Motion Firmware
//!
//! Main firmware binary for an RP2040 board driving a 3-joint stepper arm.
//! G-code lines arrive over UART0; everything else happens in one control
//! loop that never yields, so step timing is never preempted by other work.
//!
//! Named after the Latin "brachium" meaning "arm".

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

use brachium_core::config::ArmConfig;
use brachium_core::coordinator::{Coordinator, Report};
use brachium_drivers::{GpioEffector, ServoConfig, ServoGripper};
use brachium_protocol::{LineAssembler, Reply};

use crate::board::Board;
use crate::clock::EmbassyClock;
use crate::serial::Serial;

mod board;
mod clock;
mod serial;
mod servo;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Brachium firmware starting...");

    let p = embassy_rp::init(Default::default());
    let board = Board::new(p);
    info!("Peripherals initialized");

    let config = ArmConfig::default();
    unwrap!(config.validate());
    info!(
        "Arm: links {} / {} mm, lead {} mm, home ({}, {}, {})",
        config.geometry.lower_link_mm,
        config.geometry.upper_link_mm,
        config.geometry.lead_mm,
        config.home.x,
        config.home.y,
        config.home.z
    );

    let gripper = ServoGripper::new(board.servo, ServoConfig::default());
    let led = GpioEffector::new_active_high(board.led);
    let mut serial = Serial::new(board.uart_rx, board.uart_tx);

    // Drivers stay released so the arm can be positioned by hand
    let mut coordinator = Coordinator::new(config, board.joints, EmbassyClock, gripper, led);
    let mut assembler = LineAssembler::new();

    info!("ROBOT ONLINE");
    serial.reply(Reply::Info("ROBOT ONLINE"));
    serial.reply(Reply::Info("HOME ROBOT MANUALLY"));

    loop {
        for report in coordinator.cycle() {
            log_report(&report);
            if let Some(reply) = report.reply() {
                serial.reply(reply);
            }
            if matches!(report, Report::UnknownCommand { .. } | Report::ParseError(_)) {
                serial.reply(Reply::Fault);
            }
        }

        // Leave bytes in the UART buffer while the queue is full
        if !coordinator.can_accept() {
            continue;
        }

        let Some(byte) = serial.poll_byte() else {
            continue;
        };

        if let Some(command) = assembler.feed(byte) {
            debug!("Command: {:?}", command);
            match coordinator.enqueue(command) {
                Ok(()) => serial.reply(Reply::Ok),
                Err(e) => {
                    warn!("Command dropped: {:?}", e);
                    serial.reply(Reply::Error("queue full"));
                }
            }
        }
    }
}

fn log_report(report: &Report) {
    match report {
        Report::MoveComplete(pose) => debug!("Move complete at {:?}", pose),
        Report::HomingComplete => info!("Homing complete"),
        Report::ReachOverflow(target) => warn!("Target out of reach, clamped: {:?}", target),
        Report::UnknownCommand { letter, num } => warn!("Unknown command {}{}", letter, num),
        Report::ParseError(reason) => warn!("Parse error: {:?}", reason),
        Report::StepperPower(on) => info!("Steppers {}", if *on { "on" } else { "off" }),
        Report::Gripper(closed) => debug!("Gripper {}", if *closed { "closed" } else { "open" }),
    }
}
