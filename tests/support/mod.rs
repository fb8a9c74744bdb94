use std::collections::HashSet;
use std::sync::Mutex;

use uac_rust::models::{parse_catalog_json_str, Catalog};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
#[allow(dead_code)]
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK poisoned");
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// Small but structurally complete catalog used across the integration
/// tests: two cities, both school types, all three exam groups, a merged
/// department group with known quotas, and a department with repeated
/// years for the stacking behavior.
#[allow(dead_code)]
pub fn sample_json() -> &'static str {
    r#"{
  "name": "測試資料",
  "universities": [
    {
      "id": "ntu",
      "name": "國立臺灣大學",
      "short_name": "台大",
      "code": "001",
      "type": "國立",
      "category": "一般大學",
      "location": { "city": "台北市", "district": "大安區" },
      "departments": [
        {
          "id": "001012",
          "name": "資訊工程學系",
          "group_name": "資訊工程學系",
          "group": "二",
          "admissions": [
            {
              "channel": "繁星推薦",
              "year": 112,
              "dept_code": "001012",
              "quota": 10,
              "requirements": [
                { "subject": "數學A", "standard": "頂", "level": 13 }
              ],
              "comparison_order": ["在校學業成績", "學測數學A", "學測英文"],
              "result": "第一輪錄取 10 人",
              "round1": {
                "count": 10,
                "thresholds": [
                  { "item": "在校學業成績", "value": "1.00%" },
                  { "item": "學測數學A", "value": "14" }
                ]
              },
              "round2": null
            },
            {
              "channel": "個人申請",
              "year": 112,
              "dept_code": "001012",
              "quota": 20,
              "requirements": [],
              "screening_multiplier": 3.0,
              "second_stage_items": ["書面審查", "面試"],
              "result": "正取 20 名"
            }
          ]
        },
        {
          "id": "001032",
          "name": "物理學系",
          "group_name": "物理學系",
          "group": "三",
          "admissions": [
            {
              "channel": "繁星推薦",
              "year": 112,
              "dept_code": "001032",
              "quota": 6,
              "requirements": [],
              "comparison_order": ["在校學業成績", "學測自然"],
              "result": "",
              "round1": {
                "count": 6,
                "thresholds": [
                  { "item": "在校學業成績", "value": "3.00%" },
                  { "item": "學測自然", "value": "15" }
                ]
              },
              "round2": null
            }
          ]
        },
        {
          "id": "001042",
          "name": "中國文學系",
          "group_name": "中國文學系",
          "group": "一",
          "admissions": [
            {
              "channel": "繁星推薦",
              "year": 111,
              "dept_code": "001042",
              "quota": 5,
              "requirements": [],
              "comparison_order": ["在校學業成績", "學測國文"],
              "result": "",
              "round1": null,
              "round2": null
            },
            {
              "channel": "繁星推薦",
              "year": 112,
              "dept_code": "001042",
              "quota": 6,
              "requirements": [],
              "comparison_order": ["在校學業成績", "學測國文"],
              "result": "",
              "round1": null,
              "round2": null
            },
            {
              "channel": "繁星推薦",
              "year": 112,
              "dept_code": "001042",
              "quota": 2,
              "requirements": [],
              "comparison_order": ["在校學業成績", "學測國文"],
              "result": "",
              "round1": null,
              "round2": null
            }
          ]
        }
      ]
    },
    {
      "id": "fju",
      "name": "輔仁大學",
      "short_name": "輔大",
      "code": "030",
      "type": "私立",
      "category": "一般大學",
      "location": { "city": "新北市", "district": "新莊區" },
      "departments": [
        {
          "id": "030012",
          "name": "資訊工程學系",
          "group_name": "資訊工程學系",
          "group": "二",
          "admissions": [
            {
              "channel": "繁星推薦",
              "year": 112,
              "dept_code": "030012",
              "quota": 15,
              "requirements": [],
              "comparison_order": ["在校學業成績", "學測數學A"],
              "result": "兩輪合計錄取 15 人",
              "round1": {
                "count": 12,
                "thresholds": [
                  { "item": "在校學業成績", "value": "10.00%" },
                  { "item": "學測數學A", "value": "10" }
                ]
              },
              "round2": {
                "count": 3,
                "thresholds": [
                  { "item": "在校學業成績", "value": "15.00%" },
                  { "item": "學測數學A", "value": "9" }
                ]
              }
            }
          ]
        },
        {
          "id": "030052",
          "name": "哲學系",
          "group_name": "哲學系",
          "group": "一",
          "admissions": [
            {
              "channel": "個人申請",
              "year": 112,
              "dept_code": "030052",
              "quota": 30,
              "requirements": [],
              "screening_multiplier": 3.5,
              "second_stage_items": ["書面審查"],
              "result": "正取 30 名"
            }
          ]
        }
      ]
    }
  ]
}"#
}

#[allow(dead_code)]
pub fn sample_catalog() -> Catalog {
    parse_catalog_json_str(sample_json()).expect("sample catalog must parse")
}
