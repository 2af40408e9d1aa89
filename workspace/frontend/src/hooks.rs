//! Yew hooks wiring the data layer to views.
//!
//! Each dataset gets its own hook instance and therefore its own slot;
//! fetches spawned here complete in any order and only ever write to the
//! slot they belong to. The authoritative slot lives in a `use_mut_ref`
//! cell so a completion always transitions from the slot's current state,
//! not from a snapshot captured when the callback was created; the
//! `use_state` copy exists only to drive re-renders.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use chrono::NaiveDate;
use yew::prelude::*;

use crate::datasets::DatasetSlot;
use crate::prediction::{Granularity, PredictionRequestCoordinator};

/// Fetch a remote collection into its own dataset slot, on mount and on
/// demand via the returned callback.
#[hook]
pub fn use_dataset<T, F, Fut>(fetch_fn: F) -> (UseStateHandle<DatasetSlot<T>>, Callback<()>)
where
    T: Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, String>> + 'static,
{
    let slot_cell = use_mut_ref(DatasetSlot::<T>::default);
    let slot_state = use_state(DatasetSlot::<T>::default);
    let fetch_fn = use_state(|| Rc::new(fetch_fn));

    let refetch = {
        let slot_cell = slot_cell.clone();
        let slot_state = slot_state.clone();
        let fetch_fn = fetch_fn.clone();

        use_callback((), move |_, _| {
            let slot_cell = slot_cell.clone();
            let slot_state = slot_state.clone();
            let fetch_fn = fetch_fn.clone();

            transition(&slot_cell, &slot_state, DatasetSlot::begin);

            wasm_bindgen_futures::spawn_local(async move {
                let fut = (*fetch_fn)();
                match fut.await {
                    Ok(rows) => transition(&slot_cell, &slot_state, |slot| slot.resolve(rows)),
                    Err(err) => transition(&slot_cell, &slot_state, |slot| slot.reject(err)),
                }
            });
        })
    };

    // Fetch on mount
    {
        let refetch = refetch.clone();
        use_effect_with((), move |_| {
            refetch.emit(());
            || ()
        });
    }

    (slot_state, refetch)
}

fn transition<T: Clone>(
    cell: &Rc<RefCell<DatasetSlot<T>>>,
    state: &UseStateHandle<DatasetSlot<T>>,
    apply: impl FnOnce(DatasetSlot<T>) -> DatasetSlot<T>,
) {
    let mut slot = cell.borrow_mut();
    *slot = apply(std::mem::take(&mut *slot));
    state.set(slot.clone());
}

/// Drive the three forecast query slots. The returned callback issues one
/// query for `(granularity, date)`; responses land in their own slot no
/// matter how they interleave.
#[hook]
pub fn use_predictions() -> (
    UseStateHandle<PredictionRequestCoordinator>,
    Callback<(Granularity, NaiveDate)>,
) {
    let coordinator_cell = use_mut_ref(PredictionRequestCoordinator::new);
    let coordinator_state = use_state(PredictionRequestCoordinator::new);

    let request = {
        let coordinator_cell = coordinator_cell.clone();
        let coordinator_state = coordinator_state.clone();

        use_callback((), move |(granularity, date): (Granularity, NaiveDate), _| {
            let coordinator_cell = coordinator_cell.clone();
            let coordinator_state = coordinator_state.clone();

            coordinator_cell.borrow_mut().begin(granularity, date);
            coordinator_state.set(coordinator_cell.borrow().clone());

            wasm_bindgen_futures::spawn_local(async move {
                let result = crate::prediction::run_query(granularity, date).await;
                {
                    let mut coordinator = coordinator_cell.borrow_mut();
                    match result {
                        Ok(value) => coordinator.apply_success(granularity, value),
                        Err(_) => coordinator.apply_failure(granularity),
                    }
                }
                coordinator_state.set(coordinator_cell.borrow().clone());
            });
        })
    };

    (coordinator_state, request)
}
