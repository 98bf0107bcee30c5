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

//! Conversions between command line strings and ABI values.

use alloy_dyn_abi::{DynSolValue, Specifier};
use alloy_json_abi::Function;
use alloy_primitives::hex;
use anyhow::{bail, Context};

/// Parse one argument per function input, by the input's ABI type
pub(super) fn parse_args(function: &Function, args: &[String]) -> anyhow::Result<Vec<DynSolValue>> {
    if function.inputs.len() != args.len() {
        bail!(
            "{} takes {} arguments, got {}",
            function.signature(),
            function.inputs.len(),
            args.len()
        );
    }

    function
        .inputs
        .iter()
        .zip(args)
        .map(|(param, arg)| {
            let ty = param
                .resolve()
                .with_context(|| format!("unsupported type {}", param.ty))?;
            ty.coerce_str(arg)
                .with_context(|| format!("invalid {} value for {}: {arg}", param.ty, param.name))
        })
        .collect()
}

/// Render a decoded value the way it would be written as an argument
pub(super) fn format_value(value: &DynSolValue) -> String {
    match value {
        DynSolValue::Bool(b) => b.to_string(),
        DynSolValue::Int(i, _) => i.to_string(),
        DynSolValue::Uint(u, _) => u.to_string(),
        DynSolValue::FixedBytes(word, size) => format!("0x{}", hex::encode(&word[..*size])),
        DynSolValue::Address(address) => address.to_checksum(None),
        DynSolValue::Function(function) => function.to_string(),
        DynSolValue::Bytes(bytes) => format!("0x{}", hex::encode(bytes)),
        DynSolValue::String(s) => format!("{s:?}"),
        DynSolValue::Array(values) | DynSolValue::FixedArray(values) => {
            format!("[{}]", join(values))
        }
        DynSolValue::Tuple(values) => format!("({})", join(values)),
        #[allow(unreachable_patterns)]
        other => format!("{other:?}"),
    }
}

fn join(values: &[DynSolValue]) -> String {
    values.iter().map(format_value).collect::<Vec<_>>().join(", ")
}
