//! neoos firmware entry point (nRF52840).
//!
//! One embassy task runs the UI tick: sample buttons, advance the menu
//! (or the running action), draw a frame.

#![no_std]
#![no_main]

use defmt::{info, unwrap, warn};
use embassy_executor::Spawner;
use embassy_nrf::gpio::Pin;
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_time::{Duration, Ticker};
use {defmt_rtt as _, panic_probe as _};

use neoos::actions::DeviceActions;
use neoos::board::HeaderPins;
use neoos::config::UI_TICK_MS;
use neoos::menu::MenuNavigator;
use neoos::ui::buttons::{ButtonPins, Buttons};
use neoos::ui::display;

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("neoos starting");

    // SDA → P0.26, SCL → P0.27
    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let mut canvas = unwrap!(display::init(i2c));

    let mut buttons = Buttons::new(ButtonPins::new([
        p.P0_11.degrade(), // SELECT
        p.P0_12.degrade(), // BACK
        p.P0_24.degrade(), // LEFT
        p.P0_25.degrade(), // RIGHT
        p.P0_03.degrade(), // UP
        p.P0_04.degrade(), // DOWN
    ]));

    let header = HeaderPins::new([
        p.P1_10.degrade(),
        p.P1_11.degrade(),
        p.P1_12.degrade(),
        p.P1_13.degrade(),
        p.P1_14.degrade(),
    ]);
    let mut menu = MenuNavigator::new(DeviceActions::new(header));

    info!("UI running ({} ms tick)", UI_TICK_MS);
    let mut ticker = Ticker::every(Duration::from_millis(UI_TICK_MS));
    loop {
        buttons.sample();
        if let Err(e) = menu.tick(&mut buttons, &mut canvas) {
            warn!("render failed: {}", e);
        }
        ticker.next().await;
    }
}
