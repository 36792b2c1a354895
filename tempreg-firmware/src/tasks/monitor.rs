//! Monitor task
//!
//! Owns the core main loop: runs the startup banner, then cycles forever,
//! logging what each cycle did.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::{I2C0, SPI0};
use embassy_rp::pwm::PwmOutput;
use embassy_rp::spi::{self, Spi};
use embassy_time::Delay;
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};

use tempreg_core::scheduler::{CycleReport, MainLoop};
use tempreg_drivers::actuator::GpioLed;
use tempreg_drivers::display::Pcd8544;
use tempreg_drivers::input::AnalogJoystick;
use tempreg_drivers::sensor::Tmp102;

use crate::hw::{AdcAxes, PwmBuzzer};

pub type Sensor = Tmp102<I2c<'static, I2C0, i2c::Blocking>>;
pub type LcdSpi = ExclusiveDevice<Spi<'static, SPI0, spi::Blocking>, Output<'static>, NoDelay>;
pub type Lcd = Pcd8544<LcdSpi, Output<'static>, Output<'static>, PwmOutput<'static>>;
pub type Stick = AnalogJoystick<AdcAxes>;
pub type Led = GpioLed<Output<'static>>;

/// The main loop with this board's collaborators
pub type Monitor = MainLoop<'static, Sensor, Lcd, Stick, Led, PwmBuzzer, Delay>;

/// Monitor task
#[embassy_executor::task]
pub async fn monitor_task(mut monitor: Monitor) {
    info!("Monitor task started");

    if let Err(e) = monitor.start().await {
        warn!("Display error during startup: {:?}", e);
    }
    info!("Entering main loop on {:?}", monitor.controller().screen());

    loop {
        let report = monitor.run_cycle().await;
        log_cycle(&report);
    }
}

fn log_cycle(report: &CycleReport) {
    match (report.event, report.transition) {
        (Some(event), Some(t)) => {
            info!("{:?}: {:?} -> {:?} ({:?})", event, t.from, t.to, t.effect);
        }
        (Some(event), None) => {
            debug!("{:?} ignored on {:?}", event, report.screen);
        }
        _ => {}
    }

    if let Some(e) = report.sensor_error {
        warn!("Sensor read failed: {:?}, holding {}", e, report.reading);
    }
    if let Some(e) = report.display_error {
        warn!("Display update failed: {:?}", e);
    }
    if !report.alerts.is_empty() {
        debug!("Alert actions: {:?}", report.alerts.as_slice());
    }
}
