//! Temp Reg - Handheld Temperature Monitor Firmware
//!
//! Firmware binary for an RP2040 board carrying a TMP102 sensor, a
//! PCD8544 84x48 LCD, an analog joystick, six buttons, two alert LEDs
//! and a piezo buzzer.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::pwm::{self, Pwm};
use embassy_rp::spi::{self, Spi};
use embassy_time::Delay;
use embedded_hal_bus::spi::ExclusiveDevice;
use {defmt_rtt as _, panic_probe as _};

use tempreg_core::config::DeviceConfig;
use tempreg_core::scheduler::{Hardware, MainLoop};
use tempreg_core::state::Button;
use tempreg_drivers::actuator::GpioLed;
use tempreg_drivers::display::Pcd8544;
use tempreg_drivers::input::AnalogJoystick;
use tempreg_drivers::sensor::Tmp102;

use crate::channels::BUTTONS;
use crate::hw::{AdcAxes, PwmBuzzer};

mod channels;
mod hw;
mod tasks;

/// LCD SPI clock
const LCD_SPI_HZ: u32 = 4_000_000;

/// TMP102 bus speed
const SENSOR_I2C_HZ: u32 = 400_000;

/// Backlight PWM wrap value
const BACKLIGHT_TOP: u16 = 1000;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Temp Reg firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config();

    // Temperature sensor: I2C0, SDA=GPIO4, SCL=GPIO5
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = SENSOR_I2C_HZ;
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c_config);
    let sensor = Tmp102::new(i2c);
    info!("TMP102 initialized");

    // LCD: SPI0 CLK=GPIO18, MOSI=GPIO19, CS=GPIO17, DC=GPIO20, RST=GPIO21
    let mut spi_config = spi::Config::default();
    spi_config.frequency = LCD_SPI_HZ;
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_config);
    let cs = Output::new(p.PIN_17, Level::High);
    let lcd_spi = ExclusiveDevice::new_no_delay(spi, cs).unwrap();
    let dc = Output::new(p.PIN_20, Level::Low);
    let rst = Output::new(p.PIN_21, Level::High);

    // Backlight: PWM slice 3 A on GPIO22
    let mut backlight_config = pwm::Config::default();
    backlight_config.top = BACKLIGHT_TOP;
    backlight_config.compare_a = 0;
    let backlight_pwm = Pwm::new_output_a(p.PWM_SLICE3, p.PIN_22, backlight_config);
    let (backlight, _) = backlight_pwm.split();
    let backlight = backlight.unwrap();

    let mut display = Pcd8544::new(lcd_spi, dc, rst, backlight);
    if let Err(e) = display.init(&mut Delay) {
        warn!("LCD init failed: {:?}", e);
    }
    info!("LCD initialized");

    // Joystick: ADC on GPIO26 (X) and GPIO27 (Y)
    let adc = Adc::new_blocking(p.ADC, adc::Config::default());
    let x_axis = Channel::new_pin(p.PIN_26, Pull::None);
    let y_axis = Channel::new_pin(p.PIN_27, Pull::None);
    let joystick = AnalogJoystick::new(AdcAxes::new(adc, x_axis, y_axis));

    // Alert outputs: LEDs on GPIO8/9, buzzer on PWM slice 0 A (GPIO16)
    let led_high = GpioLed::new_active_high(Output::new(p.PIN_8, Level::Low));
    let led_low = GpioLed::new_active_high(Output::new(p.PIN_9, Level::Low));
    let buzzer_pwm = Pwm::new_output_a(p.PWM_SLICE0, p.PIN_16, pwm::Config::default());
    let buzzer = PwmBuzzer::new(buzzer_pwm, embassy_rp::clocks::clk_sys_freq());
    info!("ADC, LEDs and buzzer initialized");

    // Buttons: GPIO10-15, pull-down, active high
    let buttons = [
        (Input::new(p.PIN_10, Pull::Down), Button::A),
        (Input::new(p.PIN_11, Pull::Down), Button::B),
        (Input::new(p.PIN_12, Pull::Down), Button::X),
        (Input::new(p.PIN_13, Pull::Down), Button::Y),
        (Input::new(p.PIN_14, Pull::Down), Button::L),
        (Input::new(p.PIN_15, Pull::Down), Button::R),
    ];

    let hardware = Hardware {
        sensor,
        display,
        joystick,
        led_high,
        led_low,
        buzzer,
    };
    let monitor = MainLoop::new(config, hardware, Delay, &BUTTONS);

    // Spawn tasks
    info!("Spawning tasks...");

    for (pin, button) in buttons {
        spawner.spawn(tasks::button_task(pin, button)).unwrap();
    }
    spawner.spawn(tasks::monitor_task(monitor)).unwrap();

    info!("All tasks spawned, firmware running");
}

/// Compiled-in configuration
fn load_config() -> DeviceConfig {
    let config = DeviceConfig::default();
    if let Err(e) = config.validate() {
        warn!("Configuration check failed: {:?}", e);
    }
    info!(
        "Configuration loaded: high={} low={} unit={:?} alerts={:?}",
        config.threshold_high, config.threshold_low, config.unit, config.alert_mode
    );
    config
}
