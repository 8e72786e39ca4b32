//! Raw I/O port access.

use testos_hal::PortIo;
use x86_64::instructions::port::Port;

/// Direct `in`/`out` instructions on the real machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct HardwarePorts;

impl PortIo for HardwarePorts {
    fn write_port(&mut self, port: u16, value: u8) {
        let mut port = Port::<u8>::new(port);
        // SAFETY: The console only touches the CRTC (0x3D4/0x3D5) and PS/2
        // controller (0x60/0x64) ports, which have no memory side effects.
        unsafe { port.write(value) }
    }

    fn read_port(&mut self, port: u16) -> u8 {
        let mut port = Port::<u8>::new(port);
        // SAFETY: See `write_port`.
        unsafe { port.read() }
    }
}
