#![no_std]
#![no_main]

mod peripherals;
mod system;

// Panic handler and debugging
use defmt::unwrap;

use defmt_rtt as _;
use panic_probe as _;

// Device
use embassy_executor::Spawner;
use embassy_nrf::{
    bind_interrupts,
    gpio::{Input, Level, Output, OutputDrive, Pin, Pull},
    peripherals::{RNG, SPI2, TWISPI1},
    rng::{self, Rng},
    spim,
    twim::{self, Twim},
};
use embassy_sync::{blocking_mutex::raw::ThreadModeRawMutex, signal::Signal};
use embassy_time::{Duration, Instant, Ticker, Timer};

bind_interrupts!(struct Irqs {
    RNG => rng::InterruptHandler<RNG>;
    SPIM1_SPIS1_TWIM1_TWIS1_SPI1_TWI1 => twim::InterruptHandler<TWISPI1>;
    SPIM2_SPIS2_SPI2 => spim::InterruptHandler<SPI2>;
});

// Crate
use health_tracker_core::{App, AppConfig, Input as UiInput, Redraw};
use peripherals::{
    backlight::Backlight, button::Button, display::Display, touch::TouchController,
};
use system::{config::system_config, time::Clock};

// Others
use chrono::{NaiveDateTime, Timelike};

// Include current UTC epoch at compile time
include!(concat!(env!("OUT_DIR"), "/utc.rs"));

/// UI tick, also the stopwatch quantum
const UI_TICK_MS: u32 = 10;

/// Brightness after boot
const INITIAL_BRIGHTNESS: u8 = 2;

// Communication channels
static BUTTON_PRESSED: Signal<ThreadModeRawMutex, ()> = Signal::new();
static INCREASE_BRIGHTNESS: Signal<ThreadModeRawMutex, ()> = Signal::new();
static TIME: Signal<ThreadModeRawMutex, NaiveDateTime> = Signal::new();
static TOUCH_EVENT: Signal<ThreadModeRawMutex, UiInput> = Signal::new();

/// Route an input to the app, logging screen changes.
///
/// Returns `false` if the app did not handle it.
fn dispatch(app: &mut App, input: UiInput) -> bool {
    let before = app.screen();
    let handled = app.handle(input);
    if app.screen() != before {
        defmt::info!("Screen: {} -> {}", before.name(), app.screen().name());
    }
    handled
}

/// Own the app: apply inputs, advance timers and redraw every tick.
///
/// The app always advances by one tick per deadline. When painting falls
/// behind, frames are skipped until the loop catches up and the pending
/// redraw is painted then.
#[embassy_executor::task(pool_size = 1)]
async fn run_ui(mut display: Display<'static>, mut rng: Rng<'static, RNG>) {
    let config = AppConfig::default();
    unwrap!(config.validate());
    let mut app = App::new(config);

    let period = Duration::from_millis(UI_TICK_MS as u64);
    let mut deadline = Instant::now() + period;
    loop {
        if let Some(input) = TOUCH_EVENT.try_take() {
            dispatch(&mut app, input);
        }

        // Back on the main menu falls through to the backlight
        if BUTTON_PRESSED.try_take().is_some() && !dispatch(&mut app, UiInput::Button) {
            INCREASE_BRIGHTNESS.signal(());
        }

        if let Some(time) = TIME.try_take() {
            app.set_clock(time.time());
        }

        app.advance(UI_TICK_MS, &mut rng);

        if Instant::now() < deadline {
            let redraw = app.take_redraw();
            if !redraw.is_none() && display.render(&app, redraw).is_err() {
                defmt::warn!("Display update failed, repainting");
                app.request(Redraw::FULL);
            }
        } else {
            defmt::trace!("UI tick late, skipping frame");
        }

        // Wait for the next tick, returning at once if it already passed
        Timer::at(deadline).await;
        deadline += period;
    }
}

/// Cycle backlight brightness on request
#[embassy_executor::task(pool_size = 1)]
async fn update_brightness(mut backlight: Backlight<'static>) {
    loop {
        INCREASE_BRIGHTNESS.wait().await;
        backlight.cycle();
        defmt::info!("Backlight level {}", backlight.brightness());
    }
}

/// Get the current time.
#[embassy_executor::task(pool_size = 1)]
async fn update_time(clock: Clock) {
    let mut tick = Ticker::every(Duration::from_secs(1));
    loop {
        let now = clock.now();
        defmt::trace!(
            "Current time: {}:{}:{}",
            now.time().hour(),
            now.time().minute(),
            now.time().second(),
        );

        // Send time to channel
        TIME.signal(now);

        // Re-schedule the timer interrupt
        tick.next().await;
    }
}

/// Polls the button state every 10ms
#[embassy_executor::task(pool_size = 1)]
async fn poll_button(mut button: Button<'static>) {
    loop {
        if button.poll().await {
            defmt::debug!("Button pressed");
            BUTTON_PRESSED.signal(());
        }

        // Re-schedule the timer interrupt in 10ms
        Timer::after_millis(10).await;
    }
}

/// Polls the touch controller every 2ms
#[embassy_executor::task(pool_size = 1)]
async fn poll_touch(mut touch: TouchController<'static>) {
    loop {
        if let Some(input) = touch.try_event_detected() {
            defmt::debug!("Touch: {}", input);
            TOUCH_EVENT.signal(input);
        }

        // Re-schedule the timer interrupt in 2ms
        Timer::after_millis(2).await;
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(system_config());
    defmt::info!("Initializing");

    // Initialize Backlight
    let backlight = unwrap!(Backlight::init(
        Output::new(p.P0_14.degrade(), Level::High, OutputDrive::Standard),
        Output::new(p.P0_22.degrade(), Level::High, OutputDrive::Standard),
        Output::new(p.P0_23.degrade(), Level::High, OutputDrive::Standard),
        INITIAL_BRIGHTNESS,
    ));

    // Initialize Button
    let button = Button::new(
        Input::new(p.P0_13, Pull::None),
        Output::new(p.P0_15, Level::Low, OutputDrive::Standard),
    );

    // Hardware RNG feeds the simulated sensors
    let rng = Rng::new(p.RNG, Irqs);

    // Initialize I2C
    let mut i2c_config = twim::Config::default();
    // Use I2C at 400KHz (the fastest clock available on the nRF52832),
    i2c_config.frequency = twim::Frequency::K400;

    let i2c = Twim::new(p.TWISPI1, Irqs, p.P0_06, p.P0_07, i2c_config);

    // Initialize SPI
    let mut spim_config = spim::Config::default();
    // Use SPI at 8MHz (the fastest clock available on the nRF52832),
    // otherwise refreshing will be super slow.
    spim_config.frequency = spim::Frequency::M8;
    // SPI must be used in mode 3. Mode 0 (the default) won't work.
    spim_config.mode = spim::MODE_3;

    let spim = spim::Spim::new(p.SPI2, Irqs, p.P0_02, p.P0_04, p.P0_03, spim_config);

    // Initialize LCD
    let display = unwrap!(Display::init(
        spim,
        Output::new(p.P0_25, Level::High, OutputDrive::Standard),
        Output::new(p.P0_18, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_26, Level::Low, OutputDrive::Standard),
    ));

    // Initialize touch controller
    let touch = unwrap!(TouchController::init(
        i2c,
        Input::new(p.P0_28, Pull::Up), // Touchpad external interrupt pin: P0.28/AIN4 (TP_INT)
        Output::new(p.P0_10, Level::High, OutputDrive::Standard), // Touchpad reset pin: P0.10/NFC2 (TP_RESET)
    ));

    let clock = Clock::from_epoch(UTC_EPOCH);

    defmt::info!("Initialization finished");

    // Schedule tasks
    unwrap!(spawner.spawn(run_ui(display, rng)));
    unwrap!(spawner.spawn(poll_button(button)));
    unwrap!(spawner.spawn(poll_touch(touch)));
    unwrap!(spawner.spawn(update_time(clock)));
    unwrap!(spawner.spawn(update_brightness(backlight)));
}
