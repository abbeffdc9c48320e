use crate::operand::{Register16, Register8, StatusFlag};

/// Hardware model whose post-boot register state `Registers::boot` uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Model {
    #[default]
    Dmg,
    Cgb,
}

/// Register file of the LR35902.
///
/// Eight 8-bit registers paired into AF/BC/DE/HL, plus SP and PC. The low
/// nibble of F always reads as zero, so F is only reachable through
/// accessors that mask it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    f: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

impl Registers {
    /// Register state when the boot ROM hands control to cartridge code at
    /// 0x0100, per Pan Docs.
    pub fn boot(model: Model) -> Self {
        let mut regs = Registers {
            sp: 0xFFFE,
            pc: 0x0100,
            ..Default::default()
        };
        match model {
            Model::Dmg => {
                regs.a = 0x01;
                regs.set_f(0xB0);
                regs.b = 0x00;
                regs.c = 0x13;
                regs.d = 0x00;
                regs.e = 0xD8;
                regs.h = 0x01;
                regs.l = 0x4D;
            }
            Model::Cgb => {
                regs.a = 0x11;
                regs.set_f(0x80);
                regs.b = 0x00;
                regs.c = 0x00;
                regs.d = 0xFF;
                regs.e = 0x56;
                regs.h = 0x00;
                regs.l = 0x0D;
            }
        }
        regs
    }

    #[inline]
    pub fn f(&self) -> u8 {
        self.f
    }

    /// Store F; bits 3-0 are dropped.
    #[inline]
    pub fn set_f(&mut self, value: u8) {
        // Lower 4 bits of F are always zero.
        self.f = value & 0xF0;
    }

    #[inline]
    pub fn af(&self) -> u16 {
        u16::from_be_bytes([self.a, self.f])
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        let [a, f] = value.to_be_bytes();
        self.a = a;
        self.set_f(f);
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.b, self.c])
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        let [b, c] = value.to_be_bytes();
        self.b = b;
        self.c = c;
    }

    #[inline]
    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.d, self.e])
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        let [d, e] = value.to_be_bytes();
        self.d = d;
        self.e = e;
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.h, self.l])
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        let [h, l] = value.to_be_bytes();
        self.h = h;
        self.l = l;
    }

    pub fn get8(&self, r: Register8) -> u8 {
        match r {
            Register8::A => self.a,
            Register8::B => self.b,
            Register8::C => self.c,
            Register8::D => self.d,
            Register8::E => self.e,
            Register8::F => self.f,
            Register8::H => self.h,
            Register8::L => self.l,
        }
    }

    pub fn set8(&mut self, r: Register8, value: u8) {
        match r {
            Register8::A => self.a = value,
            Register8::B => self.b = value,
            Register8::C => self.c = value,
            Register8::D => self.d = value,
            Register8::E => self.e = value,
            Register8::F => self.set_f(value),
            Register8::H => self.h = value,
            Register8::L => self.l = value,
        }
    }

    pub fn get16(&self, r: Register16) -> u16 {
        match r {
            Register16::AF => self.af(),
            Register16::BC => self.bc(),
            Register16::DE => self.de(),
            Register16::HL => self.hl(),
        }
    }

    pub fn set16(&mut self, r: Register16, value: u16) {
        match r {
            Register16::AF => self.set_af(value),
            Register16::BC => self.set_bc(value),
            Register16::DE => self.set_de(value),
            Register16::HL => self.set_hl(value),
        }
    }

    #[inline]
    pub fn flag(&self, flag: StatusFlag) -> bool {
        (self.f & flag.mask()) != 0
    }

    #[inline]
    pub fn set_flag(&mut self, flag: StatusFlag, value: bool) {
        if value {
            self.f |= flag.mask();
        } else {
            self.f &= !flag.mask();
        }
    }

    #[inline]
    pub fn clear_flags(&mut self) {
        self.f = 0;
    }
}
