// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod banks;
pub mod budgets;
pub mod categories;
pub mod doctor;
pub mod recurring;
pub mod reports;
pub mod session;
pub mod transactions;
