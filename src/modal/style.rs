//! Static stylesheet shared by every modal instance
//!
//! The stylesheet has no runtime parameters; only class names tie it to the
//! markup. Hosts emit it once per instance under the instance's style key.

pub const STYLESHEET: &str = r#"/* Alert Modal Styles */
.alert-modal-overlay {
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    height: 100%;
    background-color: rgba(0, 0, 0, 0.5);
    z-index: 9999;
    display: flex;
    align-items: center;
    justify-content: center;
    animation: alert-modal-fadeIn 0.3s ease-out;
}

.alert-modal-container {
    background: white;
    border-radius: 10px;
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.2);
    overflow: hidden;
    animation: alert-modal-slideIn 0.3s ease-out;
    max-width: 500px;
    width: 90%;
    margin: 0 20px;
}

.alert-modal-container.modal-sm {
    max-width: 400px;
}

.alert-modal-container.modal-md {
    max-width: 500px;
}

.alert-modal-container.modal-lg {
    max-width: 800px;
}

.alert-modal-container.modal-xl {
    max-width: 1140px;
}

.alert-modal-content {
    text-align: center;
    padding: 30px;
}

.alert-modal-icon-container {
    margin-bottom: 20px;
}

.alert-modal-icon {
    font-size: 60px;
    line-height: 1;
}

.alert-modal-title {
    color: #595959;
    font-size: 24px;
    font-weight: 600;
    margin: 0 0 15px 0;
    padding: 0;
}

.alert-modal-body {
    margin-bottom: 25px;
    color: #545454;
    font-size: 16px;
    line-height: 1.5;
}

.alert-modal-body-text {
    margin: 0;
    padding: 0;
}

.alert-modal-footer {
    display: flex;
    justify-content: center;
    gap: 10px;
    padding-top: 20px;
    border-top: 1px solid #eee;
}

.alert-modal-btn-cancel,
.alert-modal-btn-confirm {
    padding: 10px 24px;
    font-size: 15px;
    font-weight: 500;
    border-radius: 5px;
    border: none;
    cursor: pointer;
    text-decoration: none;
    transition: all 0.2s ease;
    min-width: 100px;
    display: inline-block;
    text-align: center;
    font-family: inherit;
    box-sizing: border-box;
    line-height: 1.5;
    margin: 0;
    outline: none;
}

.alert-modal-btn-cancel {
    background-color: #f0f0f0;
    color: #555;
}

.alert-modal-btn-cancel:hover {
    background-color: #e0e0e0;
    transform: translateY(-2px);
    box-shadow: 0 5px 15px rgba(0, 0, 0, 0.1);
}

.alert-modal-btn-confirm {
    background-color: #dc3545;
    color: white;
}

.alert-modal-btn-confirm:hover {
    background-color: #c82333;
    transform: translateY(-2px);
    box-shadow: 0 5px 15px rgba(0, 0, 0, 0.1);
}

.alert-modal-btn-confirm:active,
.alert-modal-btn-cancel:active {
    transform: translateY(0);
}

.alert-modal-btn-confirm:focus,
.alert-modal-btn-cancel:focus {
    box-shadow: 0 0 0 3px rgba(66, 153, 225, 0.5);
}

/* Custom button classes */
.alert-modal-btn-confirm.btn-success {
    background-color: #28a745;
}

.alert-modal-btn-confirm.btn-success:hover {
    background-color: #218838;
}

.alert-modal-btn-confirm.btn-primary {
    background-color: #007bff;
}

.alert-modal-btn-confirm.btn-primary:hover {
    background-color: #0069d9;
}

.alert-modal-btn-confirm.btn-warning {
    background-color: #ffc107;
    color: #212529;
}

.alert-modal-btn-confirm.btn-warning:hover {
    background-color: #e0a800;
}

.alert-modal-btn-confirm.btn-info {
    background-color: #17a2b8;
}

.alert-modal-btn-confirm.btn-info:hover {
    background-color: #138496;
}

.alert-modal-btn-confirm.btn-danger {
    background-color: #dc3545;
}

.alert-modal-btn-confirm.btn-danger:hover {
    background-color: #c82333;
}

/* Animations */
@keyframes alert-modal-fadeIn {
    from { opacity: 0; }
    to { opacity: 1; }
}

@keyframes alert-modal-slideIn {
    from {
        opacity: 0;
        transform: translateY(-30px) scale(0.9);
    }
    to {
        opacity: 1;
        transform: translateY(0) scale(1);
    }
}

/* Responsive */
@media (max-width: 576px) {
    .alert-modal-container {
        margin: 10px;
        width: calc(100% - 20px);
    }
    
    .alert-modal-content {
        padding: 20px;
    }
    
    .alert-modal-footer {
        flex-direction: column;
    }
    
    .alert-modal-btn-cancel,
    .alert-modal-btn-confirm {
        width: 100%;
        margin: 5px 0;
    }
    
    .alert-modal-icon {
        font-size: 50px;
    }
    
    .alert-modal-title {
        font-size: 20px;
    }
}
"#;

/// Stylesheet for the alert modal
pub fn stylesheet() -> &'static str {
    STYLESHEET
}
