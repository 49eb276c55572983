//! Fixture data mirroring the portal's seeded dashboards.

use chrono::{DateTime, TimeZone, Utc};
use portal_core::RecordStore;
use serde_json::json;
use shared_types::{
    Activity, Announcement, LibraryDocument, Record, RecordId, Submission, UserAccount,
};

/// Reference "now" for every time-relative assertion.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 11, 1, 12, 0, 0).unwrap()
}

pub fn ids<R: Record>(records: &[&R]) -> Vec<RecordId> {
    records.iter().map(|r| r.id()).collect()
}

pub fn submissions() -> RecordStore<Submission> {
    let data = json!([
        {
            "id": 1,
            "title": "Monthly Budget Report - October 2024",
            "description": "Comprehensive monthly budget analysis for Student Council operations.",
            "officer": "John Doe",
            "organization": "Student Council",
            "category": "Financial Report",
            "submitted_date": "2024-11-01T10:30:00Z",
            "priority": "high",
            "status": "pending",
            "files": ["budget_report_oct.pdf", "supporting_data.xlsx"],
            "estimated_review_time": "2-3 hours"
        },
        {
            "id": 2,
            "title": "Equipment Purchase Receipt - Laptops",
            "officer": "Jane Smith",
            "organization": "Engineering Club",
            "category": "Purchase Receipt",
            "submitted_date": "2024-10-31T14:15:00Z",
            "priority": "medium",
            "status": "pending"
        },
        {
            "id": 3,
            "title": "Event Expense Report - Cultural Festival",
            "officer": "Mike Johnson",
            "organization": "Drama Society",
            "category": "Event Expense",
            "submitted_date": "2024-10-30T16:45:00Z",
            "priority": "low",
            "status": "pending"
        },
        {
            "id": 4,
            "title": "Training Workshop Receipt",
            "officer": "Sarah Wilson",
            "organization": "Student Government",
            "category": "Training Expense",
            "submitted_date": "2024-10-29T09:20:00Z",
            "priority": "medium",
            "status": "approved",
            "reviewed_by": "Admin Team",
            "reviewed_date": "2024-10-30T11:00:00Z",
            "comments": [{
                "id": 1,
                "author": "Admin Team",
                "content": "All documentation complete.",
                "timestamp": "2024-10-30T11:00:00Z"
            }]
        },
        {
            "id": 5,
            "title": "Office Supplies Purchase Order",
            "officer": "David Brown",
            "organization": "Environmental Club",
            "category": "Office Supplies",
            "submitted_date": "2024-10-28T13:30:00Z",
            "priority": "low",
            "status": "rejected",
            "reviewed_by": "Finance Admin",
            "reviewed_date": "2024-10-29T10:15:00Z",
            "rejection_reason": "Please use one of our pre-approved office supply vendors."
        }
    ]);
    RecordStore::from_json(&data.to_string()).unwrap()
}

pub fn users() -> RecordStore<UserAccount> {
    let data = json!([
        {"id": 1, "name": "John Doe", "email": "john.doe@pupsmb.edu.ph", "role": "officer",
         "organization": "Student Council", "status": "active",
         "last_login": "2024-11-01T10:30:00Z", "created_date": "2024-01-15T09:00:00Z",
         "submissions_count": 15, "approval_rate": 89},
        {"id": 2, "name": "Jane Smith", "email": "jane.smith@pupsmb.edu.ph", "role": "officer",
         "organization": "Engineering Club", "status": "active",
         "created_date": "2024-02-10T11:30:00Z", "submissions_count": 23, "approval_rate": 95},
        {"id": 3, "name": "Mike Johnson", "email": "mike.johnson@pupsmb.edu.ph", "role": "officer",
         "organization": "Drama Society", "status": "inactive",
         "created_date": "2024-03-05T14:20:00Z", "submissions_count": 8, "approval_rate": 75},
        {"id": 4, "name": "Sarah Wilson", "email": "sarah.wilson@pupsmb.edu.ph", "role": "admin_approval",
         "organization": "Administration", "status": "active",
         "created_date": "2024-01-01T08:00:00Z"},
        {"id": 5, "name": "David Brown", "email": "david.brown@pupsmb.edu.ph", "role": "officer",
         "organization": "Environmental Club", "status": "active",
         "created_date": "2024-04-12T10:45:00Z", "submissions_count": 12, "approval_rate": 83},
        {"id": 6, "name": "Lisa Chen", "email": "lisa.chen@pupsmb.edu.ph", "role": "viewer",
         "organization": "General Public", "status": "active",
         "created_date": "2024-06-20T15:20:00Z"},
        {"id": 7, "name": "Robert Taylor", "email": "robert.taylor@pupsmb.edu.ph", "role": "officer",
         "organization": "Sports Committee", "status": "suspended",
         "created_date": "2024-05-08T12:30:00Z", "submissions_count": 6, "approval_rate": 50}
    ]);
    RecordStore::from_json(&data.to_string()).unwrap()
}

pub fn announcements() -> RecordStore<Announcement> {
    let data = json!([
        {"id": 1, "title": "New Document Submission Guidelines Effective November 1, 2024",
         "content": "All financial reports must include digital signatures.",
         "category": "Policy Update", "priority": "urgent", "author": "Admin Department",
         "published_date": "2024-10-30T10:00:00Z", "read_by": 156, "total_recipients": 200,
         "tags": ["policy", "documents", "financial"], "is_pinned": true},
        {"id": 2, "title": "System Maintenance Scheduled for November 3, 2024",
         "content": "The system will be unavailable from 2:00 AM to 6:00 AM.",
         "category": "System Notice", "priority": "high", "author": "IT Department",
         "published_date": "2024-10-29T14:30:00Z", "read_by": 142, "total_recipients": 200,
         "tags": ["maintenance", "system", "downtime"], "is_pinned": true},
        {"id": 3, "title": "Q4 Budget Planning Documents Now Available",
         "content": "Templates for personnel costs and operational expenses are available.",
         "category": "Finance", "priority": "high", "author": "Finance Department",
         "published_date": "2024-10-28T09:15:00Z", "read_by": 89, "total_recipients": 200,
         "tags": ["budget", "planning", "finance", "Q4"]},
        {"id": 4, "title": "New User Training Sessions Available",
         "content": "Sessions cover document submission best practices.",
         "category": "Training", "priority": "medium", "author": "Training Department",
         "published_date": "2024-10-27T11:00:00Z", "read_by": 67, "total_recipients": 200,
         "tags": ["training", "education", "sessions"]},
        {"id": 5, "title": "Updated Contact Information for Support Services",
         "content": "Our support team contact information has been updated.",
         "category": "Contact Update", "priority": "medium", "author": "Admin Department",
         "published_date": "2024-10-25T16:45:00Z", "read_by": 134, "total_recipients": 200,
         "tags": ["contact", "support", "information"]},
        {"id": 6, "title": "Reminder: Monthly Report Submission Deadline",
         "content": "All monthly reports for October 2024 are due by October 31.",
         "category": "Reminder", "priority": "medium", "author": "Admin Department",
         "published_date": "2024-10-24T08:30:00Z", "read_by": 178, "total_recipients": 200,
         "tags": ["deadline", "reports", "monthly"]}
    ]);
    RecordStore::from_json(&data.to_string()).unwrap()
}

pub fn activities() -> RecordStore<Activity> {
    let data = json!([
        {"id": 1, "type": "submission", "title": "Document Submitted",
         "description": "Monthly Budget Report - October 2024 submitted for review",
         "user": "You", "timestamp": "2024-10-31T14:30:00Z",
         "details": {"documentTitle": "Monthly Budget Report - October 2024"}},
        {"id": 2, "type": "approval", "title": "Document Approved",
         "description": "Equipment Purchase Receipt - Laptops has been approved",
         "user": "Finance Team", "timestamp": "2024-10-30T16:45:00Z"},
        {"id": 3, "type": "comment", "title": "Review Comment Added",
         "description": "New comment on Monthly Budget Report - October 2024",
         "user": "Admin Department", "timestamp": "2024-10-30T11:15:00Z"},
        {"id": 4, "type": "download", "title": "Document Downloaded",
         "description": "You downloaded Quarterly Performance Report Q3",
         "user": "You", "timestamp": "2024-10-29T09:20:00Z"},
        {"id": 5, "type": "rejection", "title": "Document Rejected",
         "description": "Travel Expense Report - Conference has been rejected",
         "user": "Accounting", "timestamp": "2024-10-27T13:30:00Z"},
        {"id": 6, "type": "edit", "title": "Document Updated",
         "description": "You updated Travel Expense Report - Conference",
         "user": "You", "timestamp": "2024-10-25T10:45:00Z"},
        {"id": 7, "type": "submission", "title": "Document Submitted",
         "description": "Travel Expense Report - Conference submitted for review",
         "user": "You", "timestamp": "2024-10-25T08:00:00Z"},
        {"id": 8, "type": "approval", "title": "Document Approved",
         "description": "Quarterly Performance Report Q3 has been approved",
         "user": "Management", "timestamp": "2024-10-22T15:20:00Z"},
        {"id": 9, "type": "comment", "title": "Review Comment Added",
         "description": "New comment on Quarterly Performance Report Q3",
         "user": "Management", "timestamp": "2024-10-22T10:00:00Z"},
        {"id": 10, "type": "system", "title": "Password Changed",
         "description": "Account password was changed",
         "user": "System", "timestamp": "2024-09-15T08:00:00Z"}
    ]);
    RecordStore::from_json(&data.to_string()).unwrap()
}

pub fn library() -> RecordStore<LibraryDocument> {
    let data = json!([
        {"id": 1, "title": "Annual Financial Report 2024", "category": "Financial",
         "upload_date": "2024-01-15", "size": "2.3 MB", "type": "PDF",
         "description": "Comprehensive financial overview for fiscal year 2024"},
        {"id": 2, "title": "Budget Allocation Summary", "category": "Budget",
         "upload_date": "2024-01-10", "size": "1.8 MB", "type": "PDF",
         "description": "Detailed breakdown of budget allocations across departments"},
        {"id": 3, "title": "Procurement Guidelines", "category": "Policy",
         "upload_date": "2024-01-08", "size": "950 KB", "type": "PDF",
         "description": "Updated procurement policies and procedures"},
        {"id": 4, "title": "Performance Metrics Q4 2023", "category": "Performance",
         "upload_date": "2024-01-05", "size": "1.5 MB", "type": "PDF",
         "description": "Quarterly performance indicators and achievements"},
        {"id": 5, "title": "Organizational Structure", "category": "Administrative",
         "upload_date": "2024-01-03", "size": "720 KB", "type": "PDF",
         "description": "Current organizational chart and reporting structure"},
        {"id": 6, "title": "Audit Report 2023", "category": "Audit",
         "upload_date": "2023-12-28", "size": "3.1 MB", "type": "PDF",
         "description": "Annual audit findings and recommendations"}
    ]);
    RecordStore::from_json(&data.to_string()).unwrap()
}
