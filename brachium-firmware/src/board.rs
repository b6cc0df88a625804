//! Board pin map
//!
//! BTT SKR Pico (RP2040). The stepper sockets are used as on a RAMPS
//! build of the arm: X drives the upper joint, Y the lower joint and Z the
//! rotation axis.
//!
//! | Function        | GPIO |
//! |-----------------|------|
//! | X STEP/DIR/EN   | 11 / 10 / 12 |
//! | Y STEP/DIR/EN   | 6 / 5 / 7 |
//! | Z STEP/DIR/EN   | 19 / 28 / 2 |
//! | Servo (PWM 6B)  | 29 |
//! | Status LED      | 25 |
//! | Host UART0 TX/RX| 0 / 1 |

use embassy_rp::gpio::{Level, Output, Pin};
use embassy_rp::peripherals::UART0;
use embassy_rp::pwm::Pwm;
use embassy_rp::uart::{BufferedInterruptHandler, BufferedUartRx, BufferedUartTx, Config as UartConfig, Uart};
use embassy_rp::{bind_interrupts, Peri, Peripherals};
use static_cell::StaticCell;

use brachium_core::stepper::{JointPins, StepperPins};
use brachium_drivers::EhOutput;

use crate::servo::{self, PwmServo};

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

/// Host link baud rate
pub const BAUD: u32 = 115_200;

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Push-pull output as seen by the motion core
pub type BoardPin = EhOutput<Output<'static>>;

/// Peripherals used by the arm
pub struct Board {
    pub joints: JointPins<BoardPin>,
    pub led: BoardPin,
    pub servo: PwmServo<'static>,
    pub uart_rx: BufferedUartRx,
    pub uart_tx: BufferedUartTx,
}

impl Board {
    pub fn new(p: Peripherals) -> Self {
        let joints = JointPins {
            upper: StepperPins {
                step: output(p.PIN_11),
                dir: output(p.PIN_10),
                enable: output(p.PIN_12),
            },
            lower: StepperPins {
                step: output(p.PIN_6),
                dir: output(p.PIN_5),
                enable: output(p.PIN_7),
            },
            rotate: StepperPins {
                step: output(p.PIN_19),
                dir: output(p.PIN_28),
                enable: output(p.PIN_2),
            },
        };

        let pwm = Pwm::new_output_b(p.PWM_SLICE6, p.PIN_29, servo::frame_config());

        let mut uart_config = UartConfig::default();
        uart_config.baudrate = BAUD;
        let tx_buf = TX_BUF.init([0u8; 256]);
        let rx_buf = RX_BUF.init([0u8; 256]);
        let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
        let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
        let (uart_tx, uart_rx) = uart.split();

        Self {
            joints,
            led: output(p.PIN_25),
            servo: PwmServo::new(pwm),
            uart_rx,
            uart_tx,
        }
    }
}

fn output(pin: Peri<'static, impl Pin>) -> BoardPin {
    EhOutput::new(Output::new(pin, Level::Low))
}
