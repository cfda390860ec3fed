// top-level merge for json objects
//
// only the first level is merged: a nested object such as `launch` is owned by whichever
// document supplies it, so the supplement's copy replaces the target's rather than mixing in.

use serde_json::{Map, Value};

pub type Object = Map<String, Value>;

pub fn update(target: &mut Object, supplement: Object) {
  // overwrite keys of `target` with those of `supplement`, one level deep
  //
  // nested objects in `supplement` replace their counterparts in `target` wholesale. keys
  // already in `target` keep their position, new keys are appended in `supplement` order

  for (k, v) in supplement {
    target.insert(k, v);
  }
}

pub fn updated(mut target: Object, supplement: Object) -> Object {
  // return `target` updated with `supplement`

  update(&mut target, supplement);
  target
}
