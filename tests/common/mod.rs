#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;
use student_registry::models::{NewStudent, StudentId, StudentInput, StudentRecord};
use student_registry::{AppError, AppResult, StudentBackend};
use tokio::sync::oneshot;

/// 内存中的假后端，记录调用次数
#[derive(Default)]
pub struct FakeBackend {
    records: Mutex<Vec<StudentRecord>>,
    last_id: AtomicI64,
    pub fetch_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
    pub fail_create: AtomicBool,
    pub fail_fetch: AtomicBool,
}

impl FakeBackend {
    pub fn with_records(records: Vec<StudentRecord>) -> Self {
        let max_id = records.iter().map(|r| r.id.0).max().unwrap_or(0);
        Self {
            records: Mutex::new(records),
            last_id: AtomicI64::new(max_id),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> (usize, usize, usize) {
        (
            self.fetch_calls.load(Ordering::SeqCst),
            self.create_calls.load(Ordering::SeqCst),
            self.delete_calls.load(Ordering::SeqCst),
        )
    }
}

#[async_trait]
impl StudentBackend for FakeBackend {
    async fn fetch_all(&self) -> AppResult<Vec<StudentRecord>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(AppError::bad_status("/users", 503, None));
        }
        Ok(self.records.lock().unwrap().clone())
    }

    async fn create(&self, student: &NewStudent) -> AppResult<()> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(AppError::bad_status("/register", 500, Some("boom".to_string())));
        }
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.records.lock().unwrap().push(StudentRecord {
            id: StudentId(id),
            name: student.name.clone(),
            email: student.email.clone(),
            course: student.course.label().to_string(),
            highest_education: student.highest_education.clone(),
            percentage: student.percentage.to_string(),
            branch: student.branch.label().to_string(),
            mobile_number: student.mobile_number.clone(),
        });
        Ok(())
    }

    async fn delete_by_id(&self, id: StudentId) -> AppResult<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(AppError::not_found("学生", id));
        }
        Ok(())
    }
}

/// 每次 fetch_all 都等待测试方手动放行的后端
#[derive(Default)]
pub struct GatedBackend {
    pending: Mutex<VecDeque<oneshot::Receiver<AppResult<Vec<StudentRecord>>>>>,
}

impl GatedBackend {
    /// 预先登记一次 fetch，返回放行用的 Sender
    pub fn gate(&self) -> oneshot::Sender<AppResult<Vec<StudentRecord>>> {
        let (tx, rx) = oneshot::channel();
        self.pending.lock().unwrap().push_back(rx);
        tx
    }
}

#[async_trait]
impl StudentBackend for GatedBackend {
    async fn fetch_all(&self) -> AppResult<Vec<StudentRecord>> {
        let rx = self
            .pending
            .lock()
            .unwrap()
            .pop_front()
            .expect("fetch 次数超过登记次数");
        rx.await.unwrap_or_else(|_| Ok(Vec::new()))
    }

    async fn create(&self, _student: &NewStudent) -> AppResult<()> {
        Ok(())
    }

    async fn delete_by_id(&self, _id: StudentId) -> AppResult<()> {
        Ok(())
    }
}

pub fn record(id: i64, name: &str, course: &str, percentage: &str) -> StudentRecord {
    StudentRecord {
        id: StudentId(id),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        course: course.to_string(),
        highest_education: "B.Sc".to_string(),
        percentage: percentage.to_string(),
        branch: "Civil".to_string(),
        mobile_number: "1234567890".to_string(),
    }
}

pub fn valid_input(name: &str) -> StudentInput {
    StudentInput {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        course: "Data Science".to_string(),
        highest_education: "B.Sc".to_string(),
        percentage: "80".to_string(),
        branch: "Data Analytics".to_string(),
        mobile_number: "9876543210".to_string(),
    }
}
