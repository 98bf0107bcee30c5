// This file is part of arb-bindings.
//
// arb-bindings is free software: you can redistribute it and/or modify it under the
// terms of the GNU Lesser General Public License as published by the Free Software
// Foundation, either version 3 of the License, or (at your option) any later version.
//
// arb-bindings is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with arb-bindings.
// If not, see https://www.gnu.org/licenses/.

use arb_contracts::{cloneable::ICloneable, Cloneable};

use super::{handle::ContractHandle, method::ContractMethod};

impl<C> ContractHandle<Cloneable, C> {
    /// `isMaster()`, true only on the instance deployed from bytecode, false on its clones
    pub fn is_master(&self) -> ContractMethod<'_, C, ICloneable::isMasterCall, bool> {
        self.typed(ICloneable::isMasterCall {}, |r| r._0)
    }
}
