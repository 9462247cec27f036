// Dredge is an open source secret scanner for web archives.
// Copyright (C) 2024 Dredge ApS
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::collections::HashMap;

/// Shannon entropy of the string, in bits per code point.
pub fn shannon_entropy(raw: &str) -> f64 {
    let mut counts = HashMap::new();
    let mut total = 0_usize;

    for c in raw.chars() {
        *counts.entry(c).or_insert(0_usize) += 1;
        total += 1;
    }

    let mut entropy = 0.0;

    for count in counts.values() {
        let freq = *count as f64 / total as f64;
        entropy -= freq * freq.log2();
    }

    entropy
}
