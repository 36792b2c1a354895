//! Button edge tasks
//!
//! One task per button waits for a rising edge on its pull-down input
//! and latches the press for the monitor task.

use defmt::*;
use embassy_rp::gpio::Input;

use tempreg_core::state::Button;

use crate::channels::BUTTONS;

/// Button task
#[embassy_executor::task(pool_size = 6)]
pub async fn button_task(mut pin: Input<'static>, button: Button) {
    info!("Button task started: {:?}", button);

    loop {
        pin.wait_for_rising_edge().await;
        BUTTONS.press(button);
        trace!("Button {:?} latched", button);
    }
}
