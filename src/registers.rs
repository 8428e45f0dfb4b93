//! Register file, CPSR/SPSR, and processor-mode banking.
//!
//! ARMv4T banks r8-r12 in FIQ mode only, and r13/r14 (plus a SPSR) in every
//! privileged mode. Rather than copying values in and out of a flat `[u32;
//! 16]` on every mode switch (which is what the teacher crate did, and is
//! an easy source of stale-bank bugs if a write happens between the switch
//! and the copy-back), every access here resolves straight through to the
//! bank that owns the slot for the *current* mode.

use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// CPSR/SPSR flag and control bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PsrFlags: u32 {
        const N = 1 << 31;
        const Z = 1 << 30;
        const C = 1 << 29;
        const V = 1 << 28;
        const IRQ = 1 << 7;
        const FIQ = 1 << 6;
        const THUMB = 1 << 5;
        const MODE = 0x1F;
    }
}

/// Processor operating modes, keyed by the 5-bit CPSR mode field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    User = 0x10,
    Fiq = 0x11,
    Irq = 0x12,
    Supervisor = 0x13,
    Abort = 0x17,
    Undefined = 0x1B,
    System = 0x1F,
}

impl Mode {
    /// Decodes the mode field of a CPSR/SPSR value.
    ///
    /// Values outside the table are forbidden by spec.md §3; as a decode
    /// primitive this still needs a total function, so out-of-table bit
    /// patterns fall back to `System` the way an uninitialized or corrupted
    /// mode field would on real hardware (the mode bits simply select
    /// whichever bank they happen to name).
    pub fn from_bits(bits: u32) -> Self {
        match bits & 0x1F {
            0x10 => Mode::User,
            0x11 => Mode::Fiq,
            0x12 => Mode::Irq,
            0x13 => Mode::Supervisor,
            0x17 => Mode::Abort,
            0x1B => Mode::Undefined,
            0x1F => Mode::System,
            _ => Mode::System,
        }
    }

    /// True for every mode except `User` — the modes that bank r13/r14/SPSR.
    pub fn is_privileged(self) -> bool {
        !matches!(self, Mode::User)
    }

    /// Index into the six-way r13/r14 bank (User and System share a slot).
    fn sp_lr_bank_index(self) -> usize {
        match self {
            Mode::Fiq => 0,
            Mode::Irq => 1,
            Mode::Supervisor => 2,
            Mode::Abort => 3,
            Mode::Undefined => 4,
            Mode::User | Mode::System => 5,
        }
    }

    /// Index into the five-way SPSR bank; `None` in User/System, where SPSR
    /// is architecturally undefined (spec.md §3).
    fn spsr_bank_index(self) -> Option<usize> {
        match self {
            Mode::Fiq => Some(0),
            Mode::Irq => Some(1),
            Mode::Supervisor => Some(2),
            Mode::Abort => Some(3),
            Mode::Undefined => Some(4),
            Mode::User | Mode::System => None,
        }
    }
}

/// The full architectural register state: r0-r7 (never banked), r8-r12
/// (banked only in FIQ), r13/r14 (banked per privileged mode), r15, CPSR,
/// and SPSR per privileged mode.
///
/// Every access resolves straight through to the bank that owns the slot
/// for the *current* mode — there is no "currently visible" copy that gets
/// swapped in and out on a mode change. Swap-on-mode-change leaves a window
/// where a write between the CPSR update and the swap lands in the wrong
/// bank; resolving per access has no such window because there is nothing
/// to keep in sync.
#[derive(Clone, Serialize, Deserialize)]
pub struct Registers {
    /// r0-r7, shared by every mode.
    r_low: [u32; 8],
    /// r8-r12 while in FIQ mode.
    fiq_hi: [u32; 5],
    /// r8-r12 in every other mode.
    other_hi: [u32; 5],
    /// r13 (SP) per mode, indexed by `Mode::sp_lr_bank_index` (User/System share slot 5).
    banked_sp: [u32; 6],
    /// r14 (LR) per mode, indexed by `Mode::sp_lr_bank_index`.
    banked_lr: [u32; 6],
    /// SPSR per privileged mode, indexed by `Mode::spsr_bank_index`.
    banked_spsr: [u32; 5],
    pc: u32,
    cpsr: u32,
}

impl Registers {
    pub fn new() -> Self {
        Self {
            r_low: [0; 8],
            fiq_hi: [0; 5],
            other_hi: [0; 5],
            banked_sp: [0; 6],
            banked_lr: [0; 6],
            banked_spsr: [0; 5],
            pc: 0,
            cpsr: Mode::System as u32,
        }
    }

    pub fn reset(&mut self, entry_pc: u32) {
        *self = Self::new();
        self.cpsr = Mode::System as u32 | PsrFlags::IRQ.bits() | PsrFlags::FIQ.bits();
        let idx = self.mode().sp_lr_bank_index();
        self.banked_sp[idx] = 0x0300_7F00;
        self.banked_lr[idx] = entry_pc;
        self.pc = entry_pc;
    }

    #[inline]
    pub fn get(&self, n: usize) -> u32 {
        match n {
            0..=7 => self.r_low[n],
            8..=12 => self.hi_bank()[n - 8],
            13 => self.banked_sp[self.mode().sp_lr_bank_index()],
            14 => self.banked_lr[self.mode().sp_lr_bank_index()],
            15 => self.pc,
            _ => unreachable!("register index out of range: {n}"),
        }
    }

    #[inline]
    pub fn set(&mut self, n: usize, value: u32) {
        match n {
            0..=7 => self.r_low[n] = value,
            8..=12 => {
                let idx = self.mode();
                self.hi_bank_mut(idx)[n - 8] = value;
            }
            13 => {
                let idx = self.mode().sp_lr_bank_index();
                self.banked_sp[idx] = value;
            }
            14 => {
                let idx = self.mode().sp_lr_bank_index();
                self.banked_lr[idx] = value;
            }
            15 => self.pc = value,
            _ => unreachable!("register index out of range: {n}"),
        }
    }

    fn hi_bank(&self) -> &[u32; 5] {
        if self.mode() == Mode::Fiq {
            &self.fiq_hi
        } else {
            &self.other_hi
        }
    }

    fn hi_bank_mut(&mut self, mode: Mode) -> &mut [u32; 5] {
        if mode == Mode::Fiq {
            &mut self.fiq_hi
        } else {
            &mut self.other_hi
        }
    }

    pub fn pc(&self) -> u32 {
        self.pc
    }

    pub fn set_pc_raw(&mut self, value: u32) {
        self.pc = value;
    }

    pub fn cpsr(&self) -> u32 {
        self.cpsr
    }

    pub fn mode(&self) -> Mode {
        Mode::from_bits(self.cpsr)
    }

    pub fn is_thumb(&self) -> bool {
        self.cpsr & PsrFlags::THUMB.bits() != 0
    }

    pub fn set_thumb(&mut self, thumb: bool) {
        if thumb {
            self.cpsr |= PsrFlags::THUMB.bits();
        } else {
            self.cpsr &= !PsrFlags::THUMB.bits();
        }
    }

    pub fn irq_disabled(&self) -> bool {
        self.cpsr & PsrFlags::IRQ.bits() != 0
    }

    pub fn set_irq_disabled(&mut self, disabled: bool) {
        if disabled {
            self.cpsr |= PsrFlags::IRQ.bits();
        } else {
            self.cpsr &= !PsrFlags::IRQ.bits();
        }
    }

    pub fn flag_n(&self) -> bool {
        self.cpsr & PsrFlags::N.bits() != 0
    }
    pub fn flag_z(&self) -> bool {
        self.cpsr & PsrFlags::Z.bits() != 0
    }
    pub fn flag_c(&self) -> bool {
        self.cpsr & PsrFlags::C.bits() != 0
    }
    pub fn flag_v(&self) -> bool {
        self.cpsr & PsrFlags::V.bits() != 0
    }

    pub fn set_flag_n(&mut self, v: bool) {
        self.set_flag_bit(PsrFlags::N, v)
    }
    pub fn set_flag_z(&mut self, v: bool) {
        self.set_flag_bit(PsrFlags::Z, v)
    }
    pub fn set_flag_c(&mut self, v: bool) {
        self.set_flag_bit(PsrFlags::C, v)
    }
    pub fn set_flag_v(&mut self, v: bool) {
        self.set_flag_bit(PsrFlags::V, v)
    }

    fn set_flag_bit(&mut self, flag: PsrFlags, set: bool) {
        if set {
            self.cpsr |= flag.bits();
        } else {
            self.cpsr &= !flag.bits();
        }
    }

    /// Sets N/Z from the bit-31 / is-zero test of `result` (spec.md §9:
    /// always derived from explicit bit positions, never a native `i32`
    /// comparison).
    pub fn set_nz(&mut self, result: u32) {
        self.set_flag_n(crate::bits::bit(result, 31));
        self.set_flag_z(result == 0);
    }

    /// Writes the CPSR directly (MSR, or CPSR <- SPSR on exception return).
    /// Since every register access resolves its bank from the current mode
    /// at the time of the access, changing the mode field here is enough —
    /// there is no register content to copy.
    pub fn set_cpsr(&mut self, value: u32) {
        self.cpsr = value;
    }

    /// Changes only the mode field, leaving the flags and other control
    /// bits untouched.
    pub fn set_mode(&mut self, mode: Mode) {
        self.cpsr = (self.cpsr & !PsrFlags::MODE.bits()) | (mode as u32);
    }

    /// Reads the SPSR of the current mode. Undefined (returns CPSR) in
    /// `User`/`System`, per spec.md §3 ("SPSR is only defined in
    /// privileged modes").
    pub fn spsr(&self) -> u32 {
        match self.mode().spsr_bank_index() {
            Some(idx) => self.banked_spsr[idx],
            None => self.cpsr,
        }
    }

    pub fn set_spsr(&mut self, value: u32) {
        if let Some(idx) = self.mode().spsr_bank_index() {
            self.banked_spsr[idx] = value;
        }
    }

    /// Enters an exception: saves `return_addr` into the banked LR of
    /// `target_mode`, saves the current CPSR into that mode's SPSR, then
    /// switches mode, clears Thumb, and (if requested) disables IRQ.
    pub fn enter_exception(&mut self, target_mode: Mode, return_addr: u32, disable_irq: bool) {
        let saved_cpsr = self.cpsr;
        self.set_mode(target_mode);
        self.set_spsr(saved_cpsr);
        self.set(14, return_addr);
        self.set_thumb(false);
        if disable_irq {
            self.set_irq_disabled(true);
        }
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Registers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registers")
            .field("pc", &format!("{:#010X}", self.pc))
            .field("lr", &format!("{:#010X}", self.get(14)))
            .field("sp", &format!("{:#010X}", self.get(13)))
            .field("mode", &self.mode())
            .field("thumb", &self.is_thumb())
            .field("cpsr", &format!("{:#010X}", self.cpsr))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_sets_system_mode_and_entry_pc() {
        let mut r = Registers::new();
        r.reset(0x0800_0000);
        assert_eq!(r.mode(), Mode::System);
        assert_eq!(r.pc(), 0x0800_0000);
        assert_eq!(r.get(14), 0x0800_0000);
        assert_eq!(r.get(13), 0x0300_7F00);
        assert!(!r.is_thumb());
    }

    #[test]
    fn sp_and_lr_are_banked_per_privileged_mode() {
        let mut r = Registers::new();
        r.reset(0);
        r.set(13, 0x1111_1111);
        r.set_mode(Mode::Irq);
        r.set(13, 0x2222_2222);
        r.set_mode(Mode::Supervisor);
        r.set(13, 0x3333_3333);
        r.set_mode(Mode::Irq);
        assert_eq!(r.get(13), 0x2222_2222);
        r.set_mode(Mode::User);
        assert_eq!(r.get(13), 0x1111_1111);
    }

    #[test]
    fn fiq_banks_r8_through_r12() {
        let mut r = Registers::new();
        r.reset(0);
        for i in 8..=12 {
            r.set(i, 0xAAAA_0000 + i as u32);
        }
        r.set_mode(Mode::Fiq);
        for i in 8..=12 {
            r.set(i, 0xBBBB_0000 + i as u32);
        }
        r.set_mode(Mode::User);
        for i in 8..=12 {
            assert_eq!(r.get(i), 0xAAAA_0000 + i as u32);
        }
        r.set_mode(Mode::Fiq);
        for i in 8..=12 {
            assert_eq!(r.get(i), 0xBBBB_0000 + i as u32);
        }
    }

    #[test]
    fn spsr_is_per_mode_and_undefined_in_user() {
        let mut r = Registers::new();
        r.reset(0);
        r.set_mode(Mode::Supervisor);
        r.set_spsr(0x1234_0000);
        r.set_mode(Mode::Abort);
        r.set_spsr(0x5678_0000);
        r.set_mode(Mode::Supervisor);
        assert_eq!(r.spsr(), 0x1234_0000);
        r.set_mode(Mode::User);
        assert_eq!(r.spsr(), r.cpsr());
    }

    #[test]
    fn write_through_enter_exception_lands_in_the_target_banks_only() {
        let mut r = Registers::new();
        r.reset(0x0800_0100);
        r.set(13, 0x0300_7F00);
        r.enter_exception(Mode::Supervisor, 0x0800_0104, true);
        r.set(13, 0x0300_6000);
        assert_eq!(r.get(13), 0x0300_6000);
        r.set_mode(Mode::System);
        assert_eq!(r.get(13), 0x0300_7F00, "System's own SP bank must be untouched by the SVC write");
    }

    #[test]
    fn enter_exception_saves_lr_and_spsr_and_switches_mode() {
        let mut r = Registers::new();
        r.reset(0x0800_0100);
        r.set_flag_n(true);
        let cpsr_before = r.cpsr();
        r.enter_exception(Mode::Supervisor, 0x0800_0104, true);
        assert_eq!(r.mode(), Mode::Supervisor);
        assert_eq!(r.get(14), 0x0800_0104);
        assert_eq!(r.spsr(), cpsr_before);
        assert!(!r.is_thumb());
        assert!(r.irq_disabled());
    }
}
