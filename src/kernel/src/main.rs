//! TestOS kernel entry point.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
mod kernel {
    use bootloader::{entry_point, BootInfo};
    use core::fmt::Write;
    use core::panic::PanicInfo;
    use log::LevelFilter;
    use testos_common::Color;
    use testos_kernel::arch::x86_64::{self, HardwarePorts, VgaBuffer};
    use testos_kernel::surface::HEIGHT;
    use testos_kernel::{logger, serial_println, Console, ConsoleConfig, TextSurface};

    entry_point!(kernel_main);

    #[cfg(feature = "single-shot")]
    const CONFIG: ConsoleConfig = ConsoleConfig::SINGLE_SHOT;
    #[cfg(not(feature = "single-shot"))]
    const CONFIG: ConsoleConfig = ConsoleConfig::LOOPING;

    /// Kernel entry point.
    ///
    /// Called by the bootloader after setting up the initial environment.
    fn kernel_main(_boot_info: &'static BootInfo) -> ! {
        logger::init(LevelFilter::Info);
        log::info!("TestOS starting");

        // SAFETY: this is the only live handle until a panic takes over.
        let buffer = unsafe { VgaBuffer::new() };
        match Console::new(CONFIG, buffer, HardwarePorts, HardwarePorts) {
            Ok(mut console) => console.run(),
            Err(err) => {
                log::error!("invalid console configuration: {}", err);
                x86_64::halt_loop()
            }
        }
    }

    /// Panic handler.
    ///
    /// Reports on serial and on the bottom row of the screen.
    #[panic_handler]
    fn panic(info: &PanicInfo) -> ! {
        serial_println!("KERNEL PANIC: {}", info);

        // SAFETY: the console never runs again, so this handle is not aliased
        // by any further writes.
        let mut surface = TextSurface::new(unsafe { VgaBuffer::new() }, HardwarePorts);
        surface.set_cursor(HEIGHT - 1, 0);
        surface.set_color(Color::LightRed, Color::Black);
        let _ = write!(surface, "KERNEL PANIC: {}", info.message());

        x86_64::halt_loop()
    }
}

#[cfg(not(target_os = "none"))]
fn main() {
    eprintln!("testos-kernel runs on bare metal; build it for a target with `target_os = \"none\"`");
}
