//! Neural-inference accelerator.
//!
//! A fixed 2-2-1 network of 8-bit neurons. Weights are loaded per neuron, then each inference is
//! a write of both inputs followed by a read of the output neuron. All values are signed 8-bit;
//! the registers are 32 bits wide and take them sign-extended.

use crate::hw::RegisterBlock;

// Register offsets. `W{i}_{n}` is the weight of input `i` on neuron `n`.
pub mod reg {
    pub const W0_0: usize = 0x00;
    pub const W1_0: usize = 0x04;
    pub const W0_1: usize = 0x08;
    pub const W1_1: usize = 0x0C;
    pub const W0_2: usize = 0x10;
    pub const W1_2: usize = 0x14;
    pub const X0: usize = 0x18;
    pub const X1: usize = 0x1C;
    pub const Y1: usize = 0x20;
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Neuron {
    /// First hidden neuron.
    Hidden0,
    /// Second hidden neuron.
    Hidden1,
    /// Output neuron, fed by both hidden neurons.
    Output,
}

impl Neuron {
    /// Offsets of the (input 0, input 1) weight registers.
    fn weight_regs(self) -> (usize, usize) {
        match self {
            Neuron::Hidden0 => (reg::W0_0, reg::W1_0),
            Neuron::Hidden1 => (reg::W0_1, reg::W1_1),
            Neuron::Output => (reg::W0_2, reg::W1_2),
        }
    }
}

/// Weights for the whole network, indexed like [`Neuron`].
pub type Weights = [[i8; 2]; 3];

pub struct NnAccelerator<R: RegisterBlock> {
    regs: R,
}

impl<R: RegisterBlock> NnAccelerator<R> {
    pub fn new(regs: R) -> Self {
        Self { regs }
    }

    pub fn set_weights(&mut self, neuron: Neuron, w0: i8, w1: i8) {
        let (r0, r1) = neuron.weight_regs();
        self.regs.write(r0, sign_extend(w0));
        self.regs.write(r1, sign_extend(w1));
    }

    pub fn load(&mut self, weights: &Weights) {
        for (neuron, w) in [Neuron::Hidden0, Neuron::Hidden1, Neuron::Output]
            .into_iter()
            .zip(weights)
        {
            self.set_weights(neuron, w[0], w[1]);
        }
        debug!("nn: weights loaded");
    }

    /// Run one inference and return the output neuron.
    pub fn infer(&mut self, x0: i8, x1: i8) -> i8 {
        self.regs.write(reg::X0, sign_extend(x0));
        self.regs.write(reg::X1, sign_extend(x1));
        self.regs.read(reg::Y1) as u8 as i8
    }

    pub fn free(self) -> R {
        self.regs
    }
}

#[inline]
fn sign_extend(v: i8) -> u32 {
    v as i32 as u32
}
